mod setup;

mod weights;
