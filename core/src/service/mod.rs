pub mod seed;
pub mod task_service;

#[cfg(test)]
mod task_service_test;
