use thiserror::Error;

use crate::modules::eventos::core::evento::EventoId;

pub const DNI_ALREADY_REGISTERED: &str = "El DNI del participante ya está registrado en este evento.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventosError {
    #[error("evento {0} not found")]
    EventoNotFound(EventoId),

    #[error("participante {dni} not found in evento {evento_id}")]
    ParticipanteNotFound { evento_id: EventoId, dni: String },

    #[error("dni {dni} already registered in this evento")]
    DniAlreadyRegistered { dni: String },
}
