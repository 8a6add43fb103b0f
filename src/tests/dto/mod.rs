mod catalog_tests;

mod client_tests;

mod coercion_rule_tests;

mod json_tests;
