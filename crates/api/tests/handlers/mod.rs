mod dashboard_test;
mod middleware_test;
mod routes_test;
mod schedule_test;
