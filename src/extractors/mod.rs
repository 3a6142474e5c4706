pub mod ticketjam;
