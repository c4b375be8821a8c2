pub mod flyer_file;
