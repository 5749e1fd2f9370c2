pub mod in_memory_restriction_cache_repository_impl;
