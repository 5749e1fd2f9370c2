
mod facade_tests;
mod rest_controller_tests;
