pub mod phrasebook_loader;
