pub mod rollsim_vis2d;
