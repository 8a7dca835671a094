pub mod done;
pub mod nav;
pub mod script;
pub mod status;
