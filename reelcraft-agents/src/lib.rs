pub mod reel_blueprint;

pub use reel_blueprint::generate_blueprint;
