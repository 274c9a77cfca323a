use clap::App;

use seed_core::engine::SeedEngine;
use seed_core::search::{best_seed, LossEvaluator};

use seedkit::bin_utils::args::{ArgAugmenter, EngineArgs};
use seedkit::example::{surface_params, SphereSurface};

fn main() {
    let app = App::new("seed-example")
        .about("Minimizes a closed-form surface with best-of-N seed search");
    let matches = EngineArgs.add_args(app).get_matches();
    let settings = EngineArgs.load_from_args(&matches);

    let env = SphereSurface { cx: 1.0, cy: -0.5 };
    let mut engine: SeedEngine<f32> =
        SeedEngine::new(surface_params(), settings.stdev, settings.candidates)
            .expect("Invalid engine configuration");

    for pass in 0..settings.iterations {
        let seed = best_seed(&engine, &env).expect("Error scoring candidates");
        engine.step(seed);
        if pass % settings.report_iter == 0 {
            let loss = env.loss(engine.params()).expect("Error evaluating loss");
            println!("Iteration: {},\tLoss: {}", pass, loss);
        }
    }

    let x = engine.params().get("x").expect("x param").scalar();
    let y = engine.params().get("y").expect("y param").scalar();
    println!("Minimum found at ({}, {})", x, y);
}
