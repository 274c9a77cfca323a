//! Sinks for reporting optimization progress
//!
//! Nothing in the core depends on these.  Driver loops push tagged samples at
//! whatever cadence they like, and a sink that is absent or slow never
//! changes what the optimizer computes.

// Reduces a histogram sample to the numbers worth printing
fn summarize(values: &[f32]) -> (f32, f32, f32) {
    let mut min = values[0];
    let mut max = values[0];
    let mut total = 0f32;
    for v in values.iter() {
        if *v < min {
            min = *v;
        }
        if *v > max {
            max = *v;
        }
        total += *v;
    }
    (min, total / values.len() as f32, max)
}

/// Receives tagged samples from a driver loop
pub trait TelemetrySink {
    /// Records one scalar
    fn scalar(&mut self, generation: u64, tag: &str, value: f32) -> ();

    /// Records a batch of values
    fn histogram(&mut self, generation: u64, tag: &str, values: &[f32]) -> ();
}

/// Prints every sample to stdout
pub struct ConsoleSink;

impl TelemetrySink for ConsoleSink {
    fn scalar(&mut self, generation: u64, tag: &str, value: f32) -> () {
        println!("Generation: {},\t{}: {}", generation, tag, value);
    }

    fn histogram(&mut self, generation: u64, tag: &str, values: &[f32]) -> () {
        if values.len() == 0 {
            return;
        }
        let (min, mean, max) = summarize(values);
        println!(
            "Generation: {},\t{}: min {}, mean {}, max {} ({} values)",
            generation,
            tag,
            min,
            mean,
            max,
            values.len()
        );
    }
}

/// Discards every sample
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn scalar(&mut self, _generation: u64, _tag: &str, _value: f32) -> () {}

    fn histogram(&mut self, _generation: u64, _tag: &str, _values: &[f32]) -> () {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let (min, mean, max) = summarize(&[3f32, -1., 4., 2.]);
        assert_eq!(min, -1f32);
        assert_eq!(mean, 2f32);
        assert_eq!(max, 4f32);
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.scalar(1, "loss", 0.5);
        sink.histogram(1, "weights", &[]);
    }
}
