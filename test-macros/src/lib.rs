use proc_macro::TokenStream;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use proc_macro2::Span;
use quote::quote;
use syn::{self, Ident, LitStr};
use walkdir::WalkDir;

const INPUT_SUFFIX: &str = ".input.yaml";
const EXPECTED_SUFFIX: &str = ".expected.yaml";

struct TestCase {
    stem: String,
    input_path: PathBuf,
    expected_path: PathBuf,
}

/// Emits one `#[test]` per `<stem>.input.yaml` in the given directory that
/// has a sibling `<stem>.expected.yaml`.
///
/// The directory is relative to the invoking crate's manifest.
#[proc_macro]
pub fn test_scenarios(input: TokenStream) -> TokenStream {
    let path_lit = syn::parse_macro_input!(input as LitStr);
    let rel_path = path_lit.value();

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let base_path = Path::new(&manifest_dir).join(&rel_path);

    if !base_path.exists() {
        panic!(
            "Scenario directory does not exist: {}",
            base_path.display()
        );
    }

    let mut test_cases = Vec::new();

    for entry in WalkDir::new(&base_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };

        let Some(stem) = file_name.strip_suffix(INPUT_SUFFIX) else {
            continue;
        };

        let expected_path = path.with_file_name(format!("{stem}{EXPECTED_SUFFIX}"));
        if !expected_path.exists() {
            panic!("Scenario {} has no {stem}{EXPECTED_SUFFIX}", path.display());
        }

        test_cases.push(TestCase {
            stem: stem.to_string(),
            input_path: path.to_path_buf(),
            expected_path,
        });
    }

    if test_cases.is_empty() {
        panic!("No scenarios found in {}", base_path.display());
    }

    test_cases.sort_by(|a, b| a.stem.cmp(&b.stem));

    let tests = test_cases.iter().map(|tc| {
        let test_ident = Ident::new(&tc.stem.replace('-', "_"), Span::call_site());

        let input_path = tc.input_path.to_str().expect("Invalid UTF-8 in path");
        let expected_path = tc.expected_path.to_str().expect("Invalid UTF-8 in path");

        quote! {
            #[test]
            fn #test_ident() -> Result<(), Box<dyn std::error::Error>> {
                ::fuzzy4_test::check_scenario(#input_path, #expected_path)
            }
        }
    });

    let expanded = quote! {
        #(#tests)*
    };

    TokenStream::from(expanded)
}
