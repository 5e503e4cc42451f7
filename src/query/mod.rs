pub mod fragment;
pub mod params;

#[cfg(test)]
mod params_test;
