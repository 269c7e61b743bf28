pub mod card_stack;
pub mod match_list;
pub mod swipe_card;
pub mod tab_bar;
