mod commands;
mod table;
