use crate::server::{data::message::MessageRepository, model::message::CreateMessageParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_paginated;
