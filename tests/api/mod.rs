//! REST API endpoint tests

mod airport_booking_tests;
mod booking_tests;
mod contact_tests;
