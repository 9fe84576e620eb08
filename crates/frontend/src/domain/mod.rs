pub mod a001_chat;
