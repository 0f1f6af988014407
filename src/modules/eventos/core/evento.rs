// Evento and Participante records as stored and served by the API.
//
// Wire shape
// - camelCase field names (`nombre`, `ciudad`, `categoria`, `fecha`, `participantes`, `dni`, `email`).
// - PascalCase spellings (`Nombre`, `DNI`, ...) are accepted on input as aliases.
//
// Invariants
// - `Evento::id` is assigned by the store, never by the client.
// - Participantes inside one evento are unique by `dni`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::eventos::core::fecha::deserialize_fecha;

pub type EventoId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participante {
    #[serde(alias = "DNI", alias = "Dni")]
    pub dni: String,
    #[serde(alias = "Nombre")]
    pub nombre: String,
    #[serde(alias = "Email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evento {
    #[serde(alias = "Id")]
    pub id: EventoId,
    #[serde(alias = "Nombre")]
    pub nombre: String,
    #[serde(alias = "Ciudad")]
    pub ciudad: String,
    #[serde(alias = "Categoria")]
    pub categoria: String,
    #[serde(alias = "Fecha", deserialize_with = "deserialize_fecha")]
    pub fecha: NaiveDateTime,
    #[serde(alias = "Participantes", default)]
    pub participantes: Vec<Participante>,
}

/// Client-supplied evento body for create and update. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventoInput {
    #[serde(alias = "Nombre")]
    pub nombre: String,
    #[serde(alias = "Ciudad")]
    pub ciudad: String,
    #[serde(alias = "Categoria")]
    pub categoria: String,
    #[serde(alias = "Fecha", deserialize_with = "deserialize_fecha")]
    pub fecha: NaiveDateTime,
    #[serde(alias = "Participantes", default)]
    pub participantes: Vec<Participante>,
}

impl Evento {
    pub fn from_input(id: EventoId, input: EventoInput) -> Self {
        Self {
            id,
            nombre: input.nombre,
            ciudad: input.ciudad,
            categoria: input.categoria,
            fecha: input.fecha,
            participantes: input.participantes,
        }
    }

    /// Overwrites the editable fields. `id` and `participantes` are left untouched.
    pub fn apply_update(&mut self, input: EventoInput) {
        self.nombre = input.nombre;
        self.ciudad = input.ciudad;
        self.categoria = input.categoria;
        self.fecha = input.fecha;
    }

    pub fn has_participante(&self, dni: &str) -> bool {
        self.participantes.iter().any(|p| p.dni == dni)
    }

    pub fn in_categoria(&self, categoria: &str) -> bool {
        equals_ignore_case(&self.categoria, categoria)
    }

    pub fn in_ciudad(&self, ciudad: &str) -> bool {
        equals_ignore_case(&self.ciudad, ciudad)
    }

    /// Inclusive on both bounds; a missing bound is open.
    pub fn within(&self, desde: Option<NaiveDateTime>, hasta: Option<NaiveDateTime>) -> bool {
        desde.is_none_or(|d| self.fecha >= d) && hasta.is_none_or(|h| self.fecha <= h)
    }
}

/// Returns the first DNI that appears more than once, if any.
pub fn first_duplicate_dni(participantes: &[Participante]) -> Option<&str> {
    participantes.iter().enumerate().find_map(|(index, p)| {
        participantes[..index]
            .iter()
            .any(|earlier| earlier.dni == p.dni)
            .then_some(p.dni.as_str())
    })
}

// Unicode-aware, so "música" matches "MÚSICA".
fn equals_ignore_case(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}
