//! Ordered routine collection and the built-in default set.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Exercise;

/// A named, ordered list of exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    /// Unique routine name.
    pub name: String,

    /// Exercises in display order.
    pub exercises: Vec<Exercise>,
}

impl Routine {
    /// Create an empty routine.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exercises: Vec::new(),
        }
    }
}

/// All routines, keyed by name, in insertion order.
///
/// Serialized as a JSON object whose keys keep insertion order, so routines
/// show up in the order they were created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutineBook {
    routines: Vec<Routine>,
}

impl RoutineBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three starter routines used when no routine file exists.
    pub fn defaults() -> Self {
        let mut book = Self::new();
        book.push(Routine {
            name: "A".to_string(),
            exercises: vec![
                Exercise::new("Chest Press", 32.0)
                    .with_machine("Maquina 20")
                    .with_settings("Asiento: 3; Respaldo: 3"),
                Exercise::new("Pectoral Fly", 39.0)
                    .with_machine("Maquina 26")
                    .with_settings("Asiento: 3"),
                Exercise::new("Tríceps Polea", 14.7).with_machine("Maquina 62"),
                Exercise::new("Abdominal Maquina", 32.0)
                    .with_machine("Maquina 40")
                    .with_settings("Asiento: 3"),
                Exercise::new("Dip Chin", 32.0),
            ],
        });
        book.push(Routine {
            name: "B".to_string(),
            exercises: vec![
                Exercise::new("Press Militar Maquina", 18.0).with_machine("Maquina 50"),
                Exercise::new("Seated Leg Curl", 38.0).with_machine("Maquina 3"),
                Exercise::new("Leg Extension", 36.0).with_machine("Maquina 2"),
                Exercise::new("Abductor de Cadera", 50.0).with_machine("Maquina 4"),
                Exercise::new("Adductor de Cadera", 45.0).with_settings("Maquina"),
            ],
        });
        book.push(Routine {
            name: "C".to_string(),
            exercises: vec![
                Exercise::new("Leg Press", 63.0).with_machine("Maquina 1"),
                Exercise::new("Remada Maquina Agarre Neutro", 36.0).with_machine("Maquina 30"),
                Exercise::new("Vuelo Posterior Alternado Maquina", 32.0)
                    .with_machine("Maquina 26"),
                Exercise::new("Curl Bíceps con Mancuerna", 14.0),
                Exercise::new("Lumbar Maquina", 63.0).with_machine("Maquina 43"),
            ],
        });
        book
    }

    /// Look up a routine by name.
    pub fn get(&self, name: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Routine> {
        self.routines.iter_mut().find(|r| r.name == name)
    }

    /// Check whether a routine exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Routine names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.routines.iter().map(|r| r.name.as_str()).collect()
    }

    /// Iterate routines in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Routine> {
        self.routines.iter()
    }

    /// Number of routines.
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    /// Check if there are no routines.
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    // Callers check for duplicates first.
    pub(crate) fn push(&mut self, routine: Routine) {
        self.routines.push(routine);
    }
}

impl Serialize for RoutineBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.routines.len()))?;
        for routine in &self.routines {
            map.serialize_entry(&routine.name, &routine.exercises)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RoutineBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RoutineBookVisitor)
    }
}

struct RoutineBookVisitor;

impl<'de> Visitor<'de> for RoutineBookVisitor {
    type Value = RoutineBook;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of routine names to exercise lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut book = RoutineBook::new();
        while let Some((name, exercises)) = access.next_entry::<String, Vec<Exercise>>()? {
            if book.contains(&name) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate routine '{}'",
                    name
                )));
            }
            book.push(Routine { name, exercises });
        }
        Ok(book)
    }
}
