pub mod logging_tracing;
