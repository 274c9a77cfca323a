use clap::{App, Arg};

use seed_core::engine::SeedEngine;
use seed_core::search::{best_seed, seed_weights, AccuracyEvaluator, LossEvaluator};
use seed_models::linear::LinearRegression;
use seed_models::nn::SingleLayerNN;
use seed_models::synthetic::{gaussian_blobs, noisy_line};

use seedkit::bin_utils::args::{ArgAugmenter, EngineArgs, Policy, PolicyArgs, RunSettings};
use seedkit::telemetry::{ConsoleSink, TelemetrySink};

fn train<L>(
    engine: &mut SeedEngine<f32>,
    env: &L,
    accuracy: Option<&dyn AccuracyEvaluator<f32>>,
    policy: &Policy,
    settings: &RunSettings,
    sink: &mut dyn TelemetrySink,
) -> ()
where
    L: LossEvaluator<f32>,
{
    for pass in 0..settings.iterations {
        match policy {
            Policy::Best => {
                let seed = best_seed(engine, env).expect("Error scoring candidates");
                engine.step(seed);
            }
            Policy::Weighted { scale } => {
                let weights =
                    seed_weights(engine, env, *scale).expect("Error scoring candidates");
                engine
                    .weighted_step(&weights)
                    .expect("Weight vector length mismatch");
            }
        }

        if pass % settings.report_iter == 0 {
            let loss = env.loss(engine.params()).expect("Error evaluating loss");
            sink.scalar(engine.generation(), "loss", loss);
            if let Some(acc) = accuracy {
                let a = acc
                    .accuracy(engine.params())
                    .expect("Error evaluating accuracy");
                sink.scalar(engine.generation(), "accuracy", a);
            }
            sink.histogram(
                engine.generation(),
                "params",
                engine.params().tensors()[0].values(),
            );
        }
    }
}

fn main() {
    let app = App::new("seed-train")
        .version("0.1.0")
        .about("Optimizes a demo task with seed-compressed evolutionary strategies")
        .arg(
            Arg::with_name("task")
                .short("t")
                .long("task")
                .takes_value(true)
                .possible_values(&["regression", "blobs"])
                .help("Demo task to optimize"),
        );
    let app = EngineArgs.add_args(app);
    let app = PolicyArgs.add_args(app);
    let matches = app.get_matches();

    let settings = EngineArgs.load_from_args(&matches);
    let policy = PolicyArgs.load_from_args(&matches);
    let task = matches.value_of("task").unwrap_or("regression");

    let mut sink = ConsoleSink;
    match task {
        "blobs" => {
            let per_class = (settings.batch / 3).max(1);
            let train_data = gaussian_blobs(3, per_class, 4, 0.3, settings.data_seed);
            let test_data = gaussian_blobs(3, per_class, 4, 0.3, settings.data_seed + 1);
            let env = SingleLayerNN::new(
                train_data.inputs,
                train_data.targets,
                test_data.inputs,
                test_data.labels,
            );
            let mut engine: SeedEngine<f32> =
                SeedEngine::new(env.param_defs(), settings.stdev, settings.candidates)
                    .expect("Invalid engine configuration");

            train(
                &mut engine,
                &env,
                Some(&env as &dyn AccuracyEvaluator<f32>),
                &policy,
                &settings,
                &mut sink,
            );

            let acc = env
                .accuracy(engine.params())
                .expect("Error evaluating accuracy");
            println!("Final accuracy: {}", acc);
        }
        _ => {
            let (xs, ys) = noisy_line(-1., 1., settings.batch, 0.05, settings.data_seed);
            let env = LinearRegression::new(xs, ys);
            let mut engine: SeedEngine<f32> = SeedEngine::new(
                LinearRegression::param_defs(),
                settings.stdev,
                settings.candidates,
            )
            .expect("Invalid engine configuration");

            train(&mut engine, &env, None, &policy, &settings, &mut sink);

            let w = engine
                .params()
                .get("weight")
                .expect("weight param")
                .scalar();
            let b = engine.params().get("bias").expect("bias param").scalar();
            println!("Final model: y = {} * x + {}", w, b);
        }
    }
}
