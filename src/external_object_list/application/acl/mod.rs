pub mod access_control_facade_allow_all_impl;
pub mod access_control_facade_real_impl;
