use chrono::{DateTime, TimeDelta, Utc};
use log::info;

use crate::config::SeriesConfig;
use crate::error::SensorgenError;
use crate::generators::{DecimalGenerator, ValueGenerator};
use crate::series::{SensorRecord, ThermalGrid};

pub struct SeriesSynthesizer {
    humidity: Box<dyn ValueGenerator>,
    temperature: Box<dyn ValueGenerator>,
    thermal: Box<dyn ValueGenerator>,
    grid: ThermalGrid,
    count: usize,
    start: DateTime<Utc>,
    interval: TimeDelta,
    progress_every: usize,
}

impl SeriesSynthesizer {
    pub fn from_config(config: &SeriesConfig) -> Result<Self, SensorgenError> {
        let precision = Some(config.precision);
        Ok(Self::with_generators(
            config,
            Box::new(DecimalGenerator::new(config.humidity, precision)?),
            Box::new(DecimalGenerator::new(config.temperature, precision)?),
            Box::new(DecimalGenerator::new(config.thermal, precision)?),
        ))
    }

    /// Uses the given generators; the ranges and precision in `config` are ignored.
    pub fn with_generators(
        config: &SeriesConfig,
        humidity: Box<dyn ValueGenerator>,
        temperature: Box<dyn ValueGenerator>,
        thermal: Box<dyn ValueGenerator>,
    ) -> Self {
        Self {
            humidity,
            temperature,
            thermal,
            grid: config.grid,
            count: config.count,
            start: config.start,
            interval: config.interval,
            progress_every: config.progress_every,
        }
    }

    /// Builds the whole series in memory, oldest record first.
    pub fn synthesize(&self) -> Result<Vec<SensorRecord>, SensorgenError> {
        info!("start generating data...");

        let mut records = Vec::with_capacity(self.count);
        for index in 0..self.count {
            records.push(self.record_at(index)?);

            if should_report(index, self.progress_every) {
                info!("{index} data generated...");
            }
        }

        info!("{} data generated successfully!", self.count);
        Ok(records)
    }

    fn record_at(&self, index: usize) -> Result<SensorRecord, SensorgenError> {
        let time = timestamp_at(self.start, self.interval, index)?;
        let humidity = self.humidity.generate();
        let temperature = self.temperature.generate();
        let thermal_array = (0..self.grid.cells())
            .map(|_| self.thermal.generate())
            .collect::<Vec<_>>()
            .join(",");

        Ok(SensorRecord {
            time,
            humidity,
            temperature,
            thermal_array,
        })
    }
}

/// `start + index * interval`, or an error once chrono's range is left.
fn timestamp_at(
    start: DateTime<Utc>,
    interval: TimeDelta,
    index: usize,
) -> Result<DateTime<Utc>, SensorgenError> {
    let overflow = SensorgenError::TimestampOverflow { index };
    let Ok(n) = i64::try_from(index) else {
        return Err(overflow);
    };

    let secs = interval
        .num_seconds()
        .checked_mul(n)
        .and_then(TimeDelta::try_seconds);
    let nanos = i64::from(interval.subsec_nanos()).checked_mul(n);

    secs.zip(nanos)
        .and_then(|(secs, nanos)| secs.checked_add(&TimeDelta::nanoseconds(nanos)))
        .and_then(|offset| start.checked_add_signed(offset))
        .ok_or(overflow)
}

fn should_report(index: usize, every: usize) -> bool {
    every != 0 && index % every == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::MockValueGenerator;
    use crate::series::ValueRange;
    use quickcheck_macros::quickcheck;

    fn config_with_count(count: usize) -> SeriesConfig {
        SeriesConfig {
            count,
            ..SeriesConfig::default()
        }
    }

    fn fixed(value: &'static str, times: usize) -> Box<dyn ValueGenerator> {
        let mut mock = MockValueGenerator::new();
        mock.expect_generate()
            .times(times)
            .returning(move || value.to_string());
        Box::new(mock)
    }

    fn two_decimal(token: &str) -> bool {
        token
            .split_once('.')
            .is_some_and(|(_, frac)| frac.len() == 2)
    }

    mod mock_tests {
        use super::*;

        #[test]
        fn calls_each_generator_per_record() {
            let config = config_with_count(3);
            let synthesizer = SeriesSynthesizer::with_generators(
                &config,
                fixed("40.00", 3),
                fixed("50.00", 3),
                fixed("35.50", 3 * 768),
            );

            let records = synthesizer.synthesize().unwrap();
            assert_eq!(records.len(), 3);
            for record in &records {
                assert_eq!(record.humidity, "40.00");
                assert_eq!(record.temperature, "50.00");
                assert_eq!(record.thermal_array.split(',').count(), 768);
                assert!(record.thermal_array.split(',').all(|t| t == "35.50"));
            }
        }

        #[test]
        fn thermal_cells_keep_generation_order() {
            let config = SeriesConfig {
                count: 1,
                grid: ThermalGrid::new(2, 3),
                ..SeriesConfig::default()
            };
            let mut thermal = MockValueGenerator::new();
            let mut next = 0;
            thermal.expect_generate().times(6).returning(move || {
                next += 1;
                format!("3{next}.00")
            });

            let synthesizer = SeriesSynthesizer::with_generators(
                &config,
                fixed("40.00", 1),
                fixed("50.00", 1),
                Box::new(thermal),
            );

            let records = synthesizer.synthesize().unwrap();
            assert_eq!(records[0].thermal_array, "31.00,32.00,33.00,34.00,35.00,36.00");
        }

        #[test]
        fn empty_series_never_touches_generators() {
            let config = config_with_count(0);
            let synthesizer = SeriesSynthesizer::with_generators(
                &config,
                fixed("40.00", 0),
                fixed("50.00", 0),
                fixed("35.50", 0),
            );

            assert!(synthesizer.synthesize().unwrap().is_empty());
        }
    }

    #[quickcheck]
    fn produces_exactly_count_records(count: u8) -> bool {
        let config = SeriesConfig {
            count: usize::from(count),
            grid: ThermalGrid::new(2, 2),
            ..SeriesConfig::default()
        };
        let synthesizer = SeriesSynthesizer::from_config(&config).unwrap();
        synthesizer.synthesize().unwrap().len() == usize::from(count)
    }

    #[quickcheck]
    fn timestamps_advance_by_interval(count: u8, interval_secs: u16) -> bool {
        let interval = TimeDelta::seconds(i64::from(interval_secs) + 1);
        let config = SeriesConfig {
            count: usize::from(count),
            interval,
            grid: ThermalGrid::new(1, 1),
            ..SeriesConfig::default()
        };
        let records = SeriesSynthesizer::from_config(&config)
            .unwrap()
            .synthesize()
            .unwrap();

        records.first().is_none_or(|r| r.time == config.start)
            && records.windows(2).all(|w| w[1].time - w[0].time == interval)
    }

    #[test]
    fn single_default_record() {
        let config = config_with_count(1);
        let records = SeriesSynthesizer::from_config(&config)
            .unwrap()
            .synthesize()
            .unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.time_string(), "2023-03-03 00:00:00");

        let range = ValueRange::new(30.0, 60.0);
        for value in [&record.humidity, &record.temperature] {
            assert!(two_decimal(value), "bad precision: {value}");
            assert!(range.contains(value.parse().unwrap()));
        }

        let cells: Vec<&str> = record.thermal_array.split(',').collect();
        assert_eq!(cells.len(), 768);
        for cell in cells {
            assert!(two_decimal(cell), "bad precision: {cell}");
            assert!(range.contains(cell.parse().unwrap()));
        }
    }

    #[test]
    fn default_series_spans_1000_ticks() {
        let records = SeriesSynthesizer::from_config(&SeriesConfig::default())
            .unwrap()
            .synthesize()
            .unwrap();

        assert_eq!(records.len(), 1000);
        assert_eq!(records[999].time_string(), "2023-03-05 01:57:00");
    }

    #[test]
    fn rejects_invalid_range_in_config() {
        let config = SeriesConfig {
            thermal: ValueRange::new(60.0, 30.0),
            ..SeriesConfig::default()
        };
        assert!(matches!(
            SeriesSynthesizer::from_config(&config),
            Err(SensorgenError::InvalidRange { .. })
        ));
    }

    #[test]
    fn timestamp_overflow_is_an_error() {
        let result = timestamp_at(DateTime::<Utc>::MAX_UTC, TimeDelta::minutes(3), 1);
        assert!(matches!(
            result,
            Err(SensorgenError::TimestampOverflow { index: 1 })
        ));
        assert_eq!(
            timestamp_at(DateTime::<Utc>::MAX_UTC, TimeDelta::minutes(3), 0).unwrap(),
            DateTime::<Utc>::MAX_UTC
        );
    }

    #[test]
    fn index_past_i32_range_still_advances() {
        let start = SeriesConfig::default().start;
        let index = i32::MAX as usize + 1;

        let time = timestamp_at(start, TimeDelta::seconds(1), index).unwrap();
        assert_eq!(time, start + TimeDelta::seconds(1 << 31));
    }

    #[test]
    fn sub_second_interval_keeps_fraction() {
        let start = SeriesConfig::default().start;
        let time = timestamp_at(start, TimeDelta::milliseconds(1500), 3).unwrap();
        assert_eq!(time, start + TimeDelta::milliseconds(4500));
    }

    #[test]
    fn reports_on_cadence_including_first() {
        let hits: Vec<usize> = (0..25_000).filter(|&i| should_report(i, 10_000)).collect();
        assert_eq!(hits, vec![0, 10_000, 20_000]);
        assert!(!should_report(0, 0));
    }
}
