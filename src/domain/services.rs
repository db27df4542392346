//! Domain services for the terminal suite.
//!
//! This module provides the calculator's display boundary, which turns
//! raw input text into a result string, and the static planet catalog
//! with its randomly sampled featured strip.

use super::evaluator::ExpressionEvaluator;
use super::errors::EvalResult;
use super::models::Planet;

/// The single opaque marker every evaluation failure renders as.
pub const ERROR_MARKER: &str = "Error";

/// String-in, string-out boundary between the evaluator and the UI.
///
/// Every edit of the input buffer re-runs evaluation through this service;
/// whatever it returns simply replaces the previously displayed result.
/// All failure classes — malformed input, unknown functions, NaN outcomes —
/// collapse to the one [`ERROR_MARKER`] here.
///
/// # Examples
///
/// ```
/// use scitui::domain::Calculator;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.evaluate_display("2+3*4"), "14");
/// assert_eq!(calc.evaluate_display(""), "0");
/// assert_eq!(calc.evaluate_display("SQRT(-1)"), "Error");
/// ```
pub struct Calculator {
    evaluator: ExpressionEvaluator,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            evaluator: ExpressionEvaluator::new(),
        }
    }

    /// Evaluates input to a numeric value, keeping the typed error.
    pub fn evaluate(&self, input: &str) -> EvalResult<f64> {
        self.evaluator.evaluate(input)
    }

    /// Evaluates input to the string shown in the result line.
    ///
    /// Blank input displays as "0"; any failure displays as the marker.
    pub fn evaluate_display(&self, input: &str) -> String {
        match self.evaluator.evaluate(input) {
            Ok(value) => value.to_string(),
            Err(_) => ERROR_MARKER.to_string(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed catalog of planet content for the browser screen.
///
/// The list is hardcoded, never mutated, and sampled at random for the
/// two-entry "featured" strip.
pub struct PlanetCatalog {
    planets: Vec<Planet>,
}

impl PlanetCatalog {
    pub fn new() -> Self {
        Self {
            planets: build_planets(),
        }
    }

    pub fn all_planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Two distinct randomly chosen planets for the featured strip.
    pub fn featured_planets(&self) -> Vec<Planet> {
        let mut indices: Vec<usize> = (0..self.planets.len()).collect();
        fastrand::shuffle(&mut indices);

        indices
            .into_iter()
            .take(2)
            .map(|i| self.planets[i].clone())
            .collect()
    }
}

impl Default for PlanetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn planet(
    name: &str,
    subtitle: &str,
    hero_image: &str,
    description: &str,
    accent_start: &str,
    accent_end: &str,
    images: &[&str],
) -> Planet {
    Planet {
        name: name.to_string(),
        subtitle: subtitle.to_string(),
        hero_image: hero_image.to_string(),
        description: description.to_string(),
        accent_start: accent_start.to_string(),
        accent_end: accent_end.to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_planets() -> Vec<Planet> {
    vec![
        planet(
            "Mercury",
            "The smallest planet",
            "mercury.png",
            "Mercury is the first planet from the Sun and the smallest in the \
             Solar System. It is a rocky planet with a trace atmosphere and a \
             heavily cratered surface much like Earth's Moon. Its largest \
             crater, Caloris Planitia, spans about one-third of the planet's \
             diameter. Always appearing close to the Sun in Earth's sky, it \
             shows itself only as a morning or evening star.",
            "#353535",
            "#8d9098",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/11/mercury-messenger-globe-pia15162.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/09/spectra-mercury.jpg",
            ],
        ),
        planet(
            "Venus",
            "The hottest planet",
            "venus.png",
            "Venus is the second planet from the Sun and the hottest in the \
             Solar System, wrapped in a dense carbon-dioxide atmosphere that \
             traps heat beneath permanent clouds of sulfuric acid. Surface \
             temperatures are high enough to melt lead, and the atmospheric \
             pressure matches that found a kilometer under Earth's oceans. It \
             rotates backwards compared to most planets, so its Sun rises in \
             the west.",
            "#8a5a2b",
            "#e8c468",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/venus-mariner-10-pia23791.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/venus-magellan-colorized-hemisphere.jpg",
            ],
        ),
        planet(
            "Earth",
            "Our home planet",
            "earth.png",
            "Earth is the third planet from the Sun and the only place known \
             to harbor life. Two-thirds of its surface is covered by liquid \
             water, and its nitrogen-oxygen atmosphere shields the surface \
             from radiation while keeping temperatures in a narrow, habitable \
             band. One natural satellite, the Moon, stabilizes its axial \
             wobble and drives the ocean tides.",
            "#1b4f72",
            "#48c9b0",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/earth-blue-marble-apollo-17.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/earth-epic-full-disk.jpg",
            ],
        ),
        planet(
            "Mars",
            "The red planet",
            "mars.png",
            "Mars is the fourth planet from the Sun, a cold desert world with \
             a thin carbon-dioxide atmosphere. Iron oxide dust gives it its \
             rusty color. It hosts the tallest volcano in the Solar System, \
             Olympus Mons, and a canyon system, Valles Marineris, that would \
             stretch across the continental United States. Dry riverbeds and \
             minerals that form in water record a wetter past.",
            "#7b241c",
            "#e67e22",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/mars-full-globe-viking.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/mars-valles-marineris.jpg",
            ],
        ),
        planet(
            "Jupiter",
            "The largest planet",
            "jupiter.png",
            "Jupiter is the fifth planet from the Sun and more than twice as \
             massive as all the other planets combined. Its banded clouds of \
             ammonia and water vapor wrap a ball of hydrogen and helium, and \
             its Great Red Spot is a storm wider than Earth that has raged \
             for centuries. With nearly a hundred known moons, it anchors a \
             miniature planetary system of its own.",
            "#6e2c00",
            "#d7a86e",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/jupiter-marble-pia22946.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/jupiter-great-red-spot-juno.jpg",
            ],
        ),
        planet(
            "Saturn",
            "The ringed planet",
            "saturn.png",
            "Saturn is the sixth planet from the Sun, a gas giant adorned \
             with the most spectacular ring system in the Solar System: \
             billions of fragments of ice and rock spanning hundreds of \
             thousands of kilometers yet averaging only about ten meters \
             thick. It is the least dense planet; it would float in a \
             sufficiently large bathtub. Its moon Titan has a thicker \
             atmosphere than Earth's.",
            "#7d6608",
            "#f7dc6f",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/saturn-cassini-mosaic.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/saturn-rings-closeup-cassini.jpg",
            ],
        ),
        planet(
            "Uranus",
            "The sideways planet",
            "uranus.png",
            "Uranus is the seventh planet from the Sun and rotates on its \
             side, its axis tilted almost into the plane of its orbit, \
             likely the scar of an ancient collision. An ice giant of water, \
             methane and ammonia over a small rocky core, it owes its pale \
             cyan color to methane in its atmosphere. Its seasons last over \
             twenty Earth years each.",
            "#117864",
            "#76d7c4",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/uranus-voyager-2-pia18182.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/uranus-rings-webb.jpg",
            ],
        ),
        planet(
            "Neptune",
            "The windiest planet",
            "neptune.png",
            "Neptune is the eighth and most distant planet from the Sun, a \
             dark, cold ice giant whipped by the fastest winds in the Solar \
             System: supersonic streams of frozen methane exceeding two \
             thousand kilometers per hour. It was the first planet located \
             through mathematical prediction rather than observation. Its \
             largest moon, Triton, orbits backwards and is slowly spiraling \
             inward.",
            "#1a5276",
            "#5dade2",
            &[
                "https://science.nasa.gov/wp-content/uploads/2023/05/neptune-full-disk-voyager.jpg",
                "https://science.nasa.gov/wp-content/uploads/2023/05/neptune-triton-voyager-2.jpg",
            ],
        ),
    ]
}
