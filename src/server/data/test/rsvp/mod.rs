use crate::{model::rsvp::RsvpStatus, server::data::rsvp::RsvpRepository};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
