use crate::server::{
    error::AppError,
    model::ticket::Ticket,
    service::{
        store::StoreService,
        ticket::{TicketService, TicketVerification},
    },
};
use axum::http::StatusCode;
use test_utils::{builder::TestBuilder, factory};

mod tickets_for;
