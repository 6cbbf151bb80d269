pub mod job_stats;
