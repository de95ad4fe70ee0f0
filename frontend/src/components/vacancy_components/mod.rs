pub mod vacancy_detail;
