// In memory evento store.
//
// Purpose
// - Hold every evento for the lifetime of the process. Nothing survives a restart.
//
// Responsibilities
// - Keep eventos in insertion order; filters preserve that order.
// - Serialize all access through one RwLock so id assignment and list mutations never race.
// - Reject a mutation before touching state when it would break an invariant.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;

use crate::modules::eventos::core::errors::EventosError;
use crate::modules::eventos::core::evento::{
    Evento, EventoId, EventoInput, Participante, first_duplicate_dni,
};
use crate::modules::eventos::core::ports::EventosRepository;
use crate::modules::eventos::core::seed::seed_eventos;

#[derive(Default)]
pub struct InMemoryEventos {
    eventos: RwLock<Vec<Evento>>,
}

impl InMemoryEventos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eventos(eventos: Vec<Evento>) -> Self {
        Self {
            eventos: RwLock::new(eventos),
        }
    }

    pub fn seeded() -> Self {
        Self::with_eventos(seed_eventos())
    }

    async fn filter(&self, predicate: impl Fn(&Evento) -> bool) -> Vec<Evento> {
        self.eventos
            .read()
            .await
            .iter()
            .filter(|evento| predicate(evento))
            .cloned()
            .collect()
    }
}

fn next_id(eventos: &[Evento]) -> EventoId {
    eventos.iter().map(|e| e.id).max().unwrap_or(0) + 1
}

#[async_trait]
impl EventosRepository for InMemoryEventos {
    async fn list(&self) -> Vec<Evento> {
        self.eventos.read().await.clone()
    }

    async fn get_by_id(&self, id: EventoId) -> Result<Evento, EventosError> {
        self.eventos
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EventosError::EventoNotFound(id))
    }

    async fn create(&self, input: EventoInput) -> Result<Evento, EventosError> {
        if let Some(dni) = first_duplicate_dni(&input.participantes) {
            return Err(EventosError::DniAlreadyRegistered {
                dni: dni.to_string(),
            });
        }

        let mut guard = self.eventos.write().await;
        let evento = Evento::from_input(next_id(&guard), input);
        guard.push(evento.clone());
        Ok(evento)
    }

    async fn update(&self, id: EventoId, input: EventoInput) -> Result<(), EventosError> {
        let mut guard = self.eventos.write().await;
        let evento = guard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventosError::EventoNotFound(id))?;
        evento.apply_update(input);
        Ok(())
    }

    async fn delete(&self, id: EventoId) -> Result<(), EventosError> {
        let mut guard = self.eventos.write().await;
        let position = guard
            .iter()
            .position(|e| e.id == id)
            .ok_or(EventosError::EventoNotFound(id))?;
        guard.remove(position);
        Ok(())
    }

    async fn filter_by_categoria(&self, categoria: &str) -> Vec<Evento> {
        self.filter(|e| e.in_categoria(categoria)).await
    }

    async fn filter_by_ciudad(&self, ciudad: &str) -> Vec<Evento> {
        self.filter(|e| e.in_ciudad(ciudad)).await
    }

    async fn filter_by_fecha(
        &self,
        desde: Option<NaiveDateTime>,
        hasta: Option<NaiveDateTime>,
    ) -> Vec<Evento> {
        self.filter(|e| e.within(desde, hasta)).await
    }

    async fn list_participantes(
        &self,
        evento_id: EventoId,
    ) -> Result<Vec<Participante>, EventosError> {
        self.get_by_id(evento_id).await.map(|e| e.participantes)
    }

    async fn add_participante(
        &self,
        evento_id: EventoId,
        participante: Participante,
    ) -> Result<Participante, EventosError> {
        let mut guard = self.eventos.write().await;
        let evento = guard
            .iter_mut()
            .find(|e| e.id == evento_id)
            .ok_or(EventosError::EventoNotFound(evento_id))?;

        if evento.has_participante(&participante.dni) {
            return Err(EventosError::DniAlreadyRegistered {
                dni: participante.dni,
            });
        }

        evento.participantes.push(participante.clone());
        Ok(participante)
    }

    async fn remove_participante(&self, evento_id: EventoId, dni: &str) -> Result<(), EventosError> {
        let mut guard = self.eventos.write().await;
        let evento = guard
            .iter_mut()
            .find(|e| e.id == evento_id)
            .ok_or(EventosError::EventoNotFound(evento_id))?;

        let position = evento
            .participantes
            .iter()
            .position(|p| p.dni == dni)
            .ok_or_else(|| EventosError::ParticipanteNotFound {
                evento_id,
                dni: dni.to_string(),
            })?;
        evento.participantes.remove(position);
        Ok(())
    }
}
