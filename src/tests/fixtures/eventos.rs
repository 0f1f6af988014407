// Shared test fixtures for eventos and participantes.

use chrono::{NaiveDate, NaiveDateTime};

use crate::modules::eventos::core::evento::{Evento, EventoId, EventoInput, Participante};

fn default_fecha() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

pub fn participante(dni: &str) -> Participante {
    Participante {
        dni: dni.to_string(),
        nombre: format!("Participante {dni}"),
        email: format!("{}@example.com", dni.to_lowercase()),
    }
}

pub struct EventoInputBuilder {
    inner: EventoInput,
}

impl Default for EventoInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventoInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventoInput {
                nombre: "Festival de Jazz".to_string(),
                ciudad: "Bilbao".to_string(),
                categoria: "Música".to_string(),
                fecha: default_fecha(),
                participantes: Vec::new(),
            },
        }
    }

    pub fn nombre(mut self, v: impl Into<String>) -> Self {
        self.inner.nombre = v.into();
        self
    }

    pub fn ciudad(mut self, v: impl Into<String>) -> Self {
        self.inner.ciudad = v.into();
        self
    }

    pub fn categoria(mut self, v: impl Into<String>) -> Self {
        self.inner.categoria = v.into();
        self
    }

    pub fn fecha(mut self, v: NaiveDateTime) -> Self {
        self.inner.fecha = v;
        self
    }

    pub fn participantes(mut self, v: Vec<Participante>) -> Self {
        self.inner.participantes = v;
        self
    }

    pub fn build(self) -> EventoInput {
        self.inner
    }
}

pub struct EventoBuilder {
    id: EventoId,
    input: EventoInputBuilder,
}

impl Default for EventoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventoBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            input: EventoInputBuilder::new(),
        }
    }

    pub fn id(mut self, v: EventoId) -> Self {
        self.id = v;
        self
    }

    pub fn nombre(mut self, v: impl Into<String>) -> Self {
        self.input = self.input.nombre(v);
        self
    }

    pub fn ciudad(mut self, v: impl Into<String>) -> Self {
        self.input = self.input.ciudad(v);
        self
    }

    pub fn categoria(mut self, v: impl Into<String>) -> Self {
        self.input = self.input.categoria(v);
        self
    }

    pub fn fecha(mut self, v: NaiveDateTime) -> Self {
        self.input = self.input.fecha(v);
        self
    }

    pub fn participantes(mut self, v: Vec<Participante>) -> Self {
        self.input = self.input.participantes(v);
        self
    }

    pub fn build(self) -> Evento {
        Evento::from_input(self.id, self.input.build())
    }
}
