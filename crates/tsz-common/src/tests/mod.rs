mod diagnostics_tests;
mod span_tests;
