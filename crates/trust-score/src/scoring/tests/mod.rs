mod common;
mod composite;
mod ratings;
mod recommendations;
