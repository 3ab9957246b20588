mod scanner_impl_tests;
