pub mod console;
pub mod csharp;
