pub mod tag_record;
