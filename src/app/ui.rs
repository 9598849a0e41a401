mod center;
mod common;
mod dialogs;
mod icons;
mod info;
mod side;
mod top;
