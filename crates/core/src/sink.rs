use std::convert::Infallible;

use crate::Sample;

/// Receives samples accepted by a simulation driver.
///
/// Drivers call [`Sink::accept`] in strictly increasing time order and call
/// [`Sink::finish`] once after the last sample of a completed run. A sink is
/// never called concurrently and never sees a sample twice.
///
/// A failed `accept` or `finish` aborts the run. Samples accepted before the
/// failure stay valid; the driver does not roll them back.
///
/// Closures of the form `FnMut(&Sample) -> Result<(), E>` implement `Sink`,
/// and `Vec<Sample>` collects every sample in memory.
pub trait Sink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Accepts the next sample.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the sample cannot be recorded.
    fn accept(&mut self, sample: &Sample) -> Result<(), Self::Error>;

    /// Flushes any buffered output once the run has completed.
    ///
    /// The default implementation does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if buffered output cannot be written.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Blanket implementation for sink closures.
impl<F, E> Sink for F
where
    F: FnMut(&Sample) -> Result<(), E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn accept(&mut self, sample: &Sample) -> Result<(), E> {
        self(sample)
    }
}

/// Collects every accepted sample.
impl Sink for Vec<Sample> {
    type Error = Infallible;

    fn accept(&mut self, sample: &Sample) -> Result<(), Self::Error> {
        self.push(*sample);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use crate::State;

    fn feed<S: Sink>(sink: &mut S, times: &[f64]) -> Result<(), S::Error> {
        for &time in times {
            sink.accept(&Sample::new(time, State::new(0.0, 0.0)))?;
        }
        sink.finish()
    }

    #[test]
    fn vec_collects_samples_in_order() {
        let mut samples: Vec<Sample> = Vec::new();
        feed(&mut samples, &[0.5, 1.0, 1.5]).expect("vec sink never fails");

        let times: Vec<f64> = samples.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn closure_errors_stop_the_feed() {
        let mut seen = 0usize;
        let mut sink = |sample: &Sample| {
            if sample.time > 1.0 {
                return Err(io::Error::other("disk full"));
            }
            seen += 1;
            Ok(())
        };

        let result = feed(&mut sink, &[0.5, 1.0, 1.5, 2.0]);

        assert!(result.is_err());
        assert_eq!(seen, 2);
    }
}
