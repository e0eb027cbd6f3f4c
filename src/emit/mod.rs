pub mod emitter;
pub mod member_model;
