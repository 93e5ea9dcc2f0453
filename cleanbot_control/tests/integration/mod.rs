mod command_sequences;
mod startup;
