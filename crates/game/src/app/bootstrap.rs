use engine::{LoopConfig, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay::{self, FlightScene};

const SEED_ENV_VAR: &str = "GAME_SEED";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) simulation: Box<dyn Simulation>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Flapper Startup ===");

    let rng = match resolve_seed_from_env() {
        Some(seed) => {
            info!(seed, "obstacle_rng_seeded_from_env");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let config = LoopConfig {
        window_title: "Flapper".to_string(),
        window_width: gameplay::WINDOW_WIDTH,
        window_height: gameplay::WINDOW_HEIGHT,
        ..LoopConfig::default()
    };

    AppWiring {
        config,
        simulation: Box::new(FlightScene::new(rng)),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn resolve_seed_from_env() -> Option<u64> {
    match std::env::var(SEED_ENV_VAR) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(
                    env_var = SEED_ENV_VAR,
                    value = value.as_str(),
                    "invalid seed env var value; falling back to entropy"
                );
                None
            }
        },
        Err(std::env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(
                env_var = SEED_ENV_VAR,
                error = %err,
                "unable to read seed env var; falling back to entropy"
            );
            None
        }
    }
}
