mod fortification;
mod streets;
