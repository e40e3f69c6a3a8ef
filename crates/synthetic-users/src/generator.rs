//! Lazy, seedable generation of synthetic user rows.
//!
//! A [`SyntheticUsers`] iterator owns a `ChaCha8` RNG, so the same seed and
//! configuration always yield the same sequence. Rows are produced on demand,
//! which lets callers stream thousands of inserts without materialising the
//! whole batch.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::user::SyntheticUser;

/// Number of users produced by a default run.
pub const DEFAULT_USER_COUNT: usize = 10_000;

/// Half-open range generated ages are drawn from.
pub const AGE_RANGE: Range<i32> = 10..70;

/// Half-open range generated salaries are drawn from.
pub const SALARY_RANGE: Range<i64> = 40_000..1_040_000;

/// Places of birth used when no custom list is configured.
pub const DEFAULT_CITIES: [&str; 4] = ["Moscow", "Smolensk", "Kazan", "Kaluga"];

/// Multiplier applied to the ordinal when deriving family names.
const LAST_NAME_FACTOR: usize = 10;

/// Shape of a generation run.
///
/// # Example
///
/// ```
/// use synthetic_users::{DEFAULT_USER_COUNT, GeneratorConfig};
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.count(), DEFAULT_USER_COUNT);
/// assert_eq!(config.cities().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    count: usize,
    cities: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_USER_COUNT,
            cities: DEFAULT_CITIES.iter().map(|city| (*city).to_owned()).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Override the number of users to generate.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Replace the list of places of birth.
    #[must_use]
    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    /// Number of users the run yields.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Places of birth the run draws from.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    fn validate(&self) -> Result<(), GenerationError> {
        if self.cities.is_empty() {
            return Err(GenerationError::EmptyCityList);
        }
        if let Some(index) = self.cities.iter().position(|city| city.trim().is_empty()) {
            return Err(GenerationError::BlankCity { index });
        }
        Ok(())
    }
}

/// Iterator yielding [`SyntheticUser`] rows.
///
/// # Example
///
/// ```
/// use synthetic_users::{GeneratorConfig, SyntheticUsers};
///
/// let config = GeneratorConfig::default().with_count(5);
/// let first: Vec<_> = SyntheticUsers::from_seed(&config, 7).expect("config").collect();
/// let second: Vec<_> = SyntheticUsers::from_seed(&config, 7).expect("config").collect();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticUsers {
    rng: ChaCha8Rng,
    seed: u64,
    cities: Vec<String>,
    next_index: usize,
    count: usize,
}

impl SyntheticUsers {
    /// Build a reproducible generator from an explicit seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the city list is empty or contains a
    /// blank entry.
    pub fn from_seed(config: &GeneratorConfig, seed: u64) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            cities: config.cities.clone(),
            next_index: 0,
            count: config.count,
        })
    }

    /// Build a generator seeded from the thread-local entropy source.
    ///
    /// The drawn seed is available through [`SyntheticUsers::seed`] so a run
    /// can be replayed later.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the configuration is invalid.
    pub fn from_entropy(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let seed: u64 = rand::rng().random();
        Self::from_seed(config, seed)
    }

    /// Seed driving this generator.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    fn pick_city(&mut self) -> String {
        let index = self.rng.random_range(0..self.cities.len());
        // `validate` guarantees a non-empty list, so the lookup always hits.
        self.cities.get(index).cloned().unwrap_or_default()
    }
}

impl Iterator for SyntheticUsers {
    type Item = SyntheticUser;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.count {
            return None;
        }
        let ordinal = self.next_index.saturating_add(1);
        self.next_index = ordinal;

        let age = self.rng.random_range(AGE_RANGE);
        let place_of_birth = self.pick_city();
        let salary = self.rng.random_range(SALARY_RANGE);

        Some(SyntheticUser {
            name: format!("Name {ordinal}"),
            last_name: format!("Lastname {}", ordinal.saturating_mul(LAST_NAME_FACTOR)),
            age,
            place_of_birth,
            salary,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SyntheticUsers {}
