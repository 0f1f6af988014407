// Fixed eventos the store starts with on every boot.

use chrono::{NaiveDate, NaiveDateTime};

use crate::modules::eventos::core::evento::{Evento, Participante};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn seed_eventos() -> Vec<Evento> {
    vec![
        Evento {
            id: 1,
            nombre: "Concierto Rock".to_string(),
            ciudad: "Madrid".to_string(),
            categoria: "Música".to_string(),
            fecha: midnight(2025, 5, 10),
            participantes: vec![Participante {
                dni: "12345678A".to_string(),
                nombre: "Juan Perez".to_string(),
                email: "juan@example.com".to_string(),
            }],
        },
        Evento {
            id: 2,
            nombre: "Feria de Libros".to_string(),
            ciudad: "Barcelona".to_string(),
            categoria: "Cultura".to_string(),
            fecha: midnight(2025, 6, 15),
            participantes: Vec::new(),
        },
    ]
}
