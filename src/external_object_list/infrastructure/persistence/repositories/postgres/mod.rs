pub mod sqlx_object_repository_impl;
