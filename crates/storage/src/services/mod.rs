pub mod participant_card;
