pub mod calc_summary;
pub mod logout_time;
pub mod time_of_day;
pub mod work_policy;
