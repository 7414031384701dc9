pub mod iteration_count;
