use crate::server::{data::user::UserRepository, model::user::ResolveUserParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_ids;
mod insert_or_get;
