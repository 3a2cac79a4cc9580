//! Scenario fixtures: an operation with its operands, and what it must yield.
//!
//! An input fixture names an operation and its operands as raw `[T, F]`
//! pairs, so that construction itself can be exercised:
//!
//! ```yaml
//! op: and
//! args:
//!   - [0.8, 0.2]
//!   - [0.6, 0.3]
//! ```
//!
//! The matching expected fixture holds exactly one of `value`, `error`,
//! `state` or `components`, plus an optional `tolerance`.

use std::{fs::File, io::BufReader, path::Path};

use fuzzy4_core::{Components, Error, FuzzyValue, State, DEFAULT_TOLERANCE};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    New,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Accumulate,
    Scale,
    Divide,
    Components,
    Dominant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub op: Op,
    #[serde(default)]
    pub args: Vec<(f64, f64)>,
    pub k: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Domain,
    DivisionByZero,
}

impl From<&Error> for ErrorKind {
    fn from(err: &Error) -> Self {
        match err {
            Error::Domain { .. } => ErrorKind::Domain,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expected {
    pub value: Option<(f64, f64)>,
    pub error: Option<ErrorKind>,
    pub state: Option<State>,
    pub components: Option<Components>,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(FuzzyValue),
    Components(Components),
    State(State),
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("{op:?} takes {expected} operand(s), got {got}")]
    Arity {
        op: Op,
        expected: &'static str,
        got: usize,
    },
    #[error("{0:?} needs a scalar `k`")]
    MissingScalar(Op),
    #[error("expected fixture must hold exactly one of value, error, state, components")]
    AmbiguousExpectation,
    #[error("expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

impl Scenario {
    fn unary(&self) -> Result<(f64, f64), ScenarioError> {
        match self.args.as_slice() {
            [x] => Ok(*x),
            _ => Err(self.arity("1")),
        }
    }

    fn binary(&self) -> Result<((f64, f64), (f64, f64)), ScenarioError> {
        match self.args.as_slice() {
            [x, y] => Ok((*x, *y)),
            _ => Err(self.arity("2")),
        }
    }

    fn arity(&self, expected: &'static str) -> ScenarioError {
        ScenarioError::Arity {
            op: self.op,
            expected,
            got: self.args.len(),
        }
    }

    fn scalar(&self) -> Result<f64, ScenarioError> {
        self.k.ok_or(ScenarioError::MissingScalar(self.op))
    }

    /// Runs the operation. The outer `Result` reports a malformed fixture,
    /// the inner one the library's verdict.
    pub fn evaluate(&self) -> Result<Result<Outcome, Error>, ScenarioError> {
        let value = |(t, f): (f64, f64)| FuzzyValue::new(t, f);
        let binop = |op: fn(&FuzzyValue, &FuzzyValue) -> FuzzyValue| {
            self.binary().map(|(x, y)| {
                let (x, y) = (value(x)?, value(y)?);
                Ok::<_, Error>(Outcome::Value(op(&x, &y)))
            })
        };

        match self.op {
            Op::New => self.unary().map(|x| value(x).map(Outcome::Value)),
            Op::Not => self.unary().map(|x| value(x).map(|x| Outcome::Value(!x))),
            Op::And => binop(FuzzyValue::and),
            Op::Or => binop(FuzzyValue::or),
            Op::Implies => binop(FuzzyValue::implies),
            Op::Iff => binop(FuzzyValue::iff),
            Op::Accumulate => Ok(self
                .args
                .iter()
                .map(|x| value(*x))
                .collect::<Result<Vec<_>, _>>()
                .map(|values| Outcome::Value(FuzzyValue::accumulate_all(values)))),
            Op::Scale => {
                let (x, k) = (self.unary()?, self.scalar()?);
                Ok(value(x).and_then(|x| x.scale(k)).map(Outcome::Value))
            }
            Op::Divide => {
                let (x, k) = (self.unary()?, self.scalar()?);
                Ok(value(x).and_then(|x| x.divide(k)).map(Outcome::Value))
            }
            Op::Components => self
                .unary()
                .map(|x| value(x).map(|x| Outcome::Components(x.as_components()))),
            Op::Dominant => self
                .unary()
                .map(|x| value(x).map(|x| Outcome::State(x.dominant_state()))),
        }
    }
}

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

impl Expected {
    /// Compares an evaluated outcome against this expectation.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Mismatch`] describing the first difference.
    pub fn verify(&self, outcome: &Result<Outcome, Error>) -> Result<(), ScenarioError> {
        let set = [
            self.value.is_some(),
            self.error.is_some(),
            self.state.is_some(),
            self.components.is_some(),
        ];
        if set.iter().filter(|b| **b).count() != 1 {
            return Err(ScenarioError::AmbiguousExpectation);
        }

        let tol = self.tolerance;
        let ok = match (outcome, self) {
            (
                Ok(Outcome::Value(v)),
                Expected {
                    value: Some((t, f)),
                    ..
                },
            ) => close(v.t(), *t, tol) && close(v.f(), *f, tol),
            (Err(err), Expected { error: Some(kind), .. }) => ErrorKind::from(err) == *kind,
            (Ok(Outcome::State(s)), Expected { state: Some(e), .. }) => s == e,
            (
                Ok(Outcome::Components(c)),
                Expected {
                    components: Some(e),
                    ..
                },
            ) => c
                .iter()
                .all(|(state, degree)| close(degree, e.get(state), tol)),
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(ScenarioError::Mismatch {
                expected: format!("{self:?}"),
                actual: format!("{outcome:?}"),
            })
        }
    }
}

/// Loads an input fixture and its expected fixture and checks one against
/// the other.
///
/// # Errors
///
/// Fails if either fixture cannot be read or decoded, if the scenario is
/// malformed, or if the outcome does not match.
pub fn check_scenario(
    input_path: impl AsRef<Path>,
    expected_path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario: Scenario = serde_norway::from_reader(BufReader::new(File::open(input_path)?))?;
    let expected: Expected =
        serde_norway::from_reader(BufReader::new(File::open(expected_path)?))?;

    let outcome = scenario.evaluate()?;
    expected.verify(&outcome)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(yaml: &str) -> Scenario {
        serde_norway::from_str(yaml).unwrap()
    }

    fn expected(yaml: &str) -> Expected {
        serde_norway::from_str(yaml).unwrap()
    }

    #[test]
    fn test_evaluate_and() {
        let s = scenario("op: and\nargs:\n  - [0.8, 0.2]\n  - [0.6, 0.3]\n");
        let outcome = s.evaluate().unwrap();
        expected("value: [0.48, 0.44]\n").verify(&outcome).unwrap();
    }

    #[test]
    fn test_evaluate_reports_arity() {
        let s = scenario("op: not\nargs: []\n");
        assert!(matches!(
            s.evaluate(),
            Err(ScenarioError::Arity { got: 0, .. })
        ));
    }

    #[test]
    fn test_missing_scalar() {
        let s = scenario("op: scale\nargs:\n  - [0.5, 0.5]\n");
        assert!(matches!(
            s.evaluate(),
            Err(ScenarioError::MissingScalar(Op::Scale))
        ));
    }

    #[test]
    fn test_verify_mismatch() {
        let outcome = Ok(Outcome::Value(FuzzyValue::TRUE));
        let err = expected("value: [0.0, 1.0]\n").verify(&outcome).unwrap_err();
        assert!(matches!(err, ScenarioError::Mismatch { .. }));

        let err = expected("error: domain\n").verify(&outcome).unwrap_err();
        assert!(matches!(err, ScenarioError::Mismatch { .. }));
    }

    #[test]
    fn test_verify_rejects_ambiguous_expectation() {
        let outcome = Ok(Outcome::Value(FuzzyValue::TRUE));
        let err = expected("value: [1.0, 0.0]\nerror: domain\n")
            .verify(&outcome)
            .unwrap_err();
        assert!(matches!(err, ScenarioError::AmbiguousExpectation));
    }
}
