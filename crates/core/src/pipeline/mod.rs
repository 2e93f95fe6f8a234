pub mod conversation_use_case;
