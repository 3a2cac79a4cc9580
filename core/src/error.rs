use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A quantity fell outside the unit interval, was not finite, or was a
    /// negative scalar.
    #[error("{what} out of domain: {value}")]
    Domain { what: &'static str, value: f64 },
    /// Division by a zero scalar or by a zero component.
    #[error("division by zero")]
    DivisionByZero,
}

impl Error {
    pub(crate) const fn domain(what: &'static str, value: f64) -> Error {
        Error::Domain { what, value }
    }
}
