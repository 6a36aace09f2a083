mod join_record;
