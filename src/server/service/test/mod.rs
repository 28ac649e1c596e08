use crate::{
    model::{blog::CreateBlogDto, contact::CreateMessageDto, pagination::PaginationDto},
    server::{
        data::blog::BlogRepository,
        error::{internal::InternalError, AppError},
        model::{
            blog::{BlogStatus, CreateBlogParams},
            user::User,
        },
        network::mapping::MapFrom,
        service::{
            blog::{map_create_error, BlogService},
            contact::ContactService,
        },
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod contact;
