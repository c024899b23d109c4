use env_logger::Env;
use tap_claim::stages::{self, GameStage};
use tap_claim::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    EngineBuilder::new()
        .build(stages::registry())
        .run(GameStage::Boot);
}
