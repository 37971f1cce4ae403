use std::{cmp::Ordering, fmt, str::FromStr};

use serde_derive::Serialize;

use super::{Latency, Vertex};
use crate::error::{NetworkError, Result};

/// Propagation speed of a signal in copper wire in meters per second.
pub const COPPER_SPEED: f64 = 230_000_000.0;

/// Propagation speed of a signal in optical fiber in meters per second.
pub const FIBER_SPEED: f64 = 200_000_000.0;

const NANOSECONDS_PER_SECOND: f64 = 1_000_000_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Copper,
    Optical,
}

impl Material {
    /// Meters per second.
    pub fn propagation_speed(&self) -> f64 {
        match self {
            Material::Copper => COPPER_SPEED,
            Material::Optical => FIBER_SPEED,
        }
    }
}

impl FromStr for Material {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "copper" => Ok(Material::Copper),
            "optical" => Ok(Material::Optical),
            other => Err(NetworkError::InvalidEdge(format!(
                "unknown material '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Copper => write!(f, "copper"),
            Material::Optical => write!(f, "optical"),
        }
    }
}

/// One direction of a physical cable. The latency in nanoseconds is derived
/// from material and length (in meters) once, on construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cable {
    tail: Vertex,
    head: Vertex,
    material: Material,
    length: f64,
    bandwidth: u64,
    latency: Latency,
}

impl Cable {
    pub fn new(
        tail: Vertex,
        head: Vertex,
        material: Material,
        length: f64,
        bandwidth: u64,
    ) -> Result<Cable> {
        if length.is_nan() {
            return Err(NetworkError::InvalidEdge("length is NaN".to_string()));
        }
        if !length.is_finite() || length < 0.0 {
            return Err(NetworkError::InvalidEdge(format!(
                "length {} is not a non-negative finite number",
                length
            )));
        }

        let latency = length * NANOSECONDS_PER_SECOND / material.propagation_speed();

        Ok(Cable {
            tail,
            head,
            material,
            length,
            bandwidth,
            latency,
        })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bandwidth(&self) -> u64 {
        self.bandwidth
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn is_copper(&self) -> bool {
        self.material == Material::Copper
    }

    /// The same cable travelled in the opposite direction.
    pub fn reversed(&self) -> Cable {
        Cable {
            tail: self.head,
            head: self.tail,
            ..self.clone()
        }
    }

    /// Total order by ascending latency.
    pub fn cmp_latency(&self, other: &Cable) -> Ordering {
        self.latency.total_cmp(&other.latency)
    }
}

impl fmt::Display for Cable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:5.2}", self.tail, self.head, self.latency)
    }
}
