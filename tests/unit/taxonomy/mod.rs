mod categories;
