// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 提取服务（extraction_service）：从 HTML 中提取品牌名称和描述
/// - LLM服务（llm_service）：调用生成服务改写描述
/// - 网站服务（website_service）：已存储记录的列表、更新和删除
pub mod extraction_service;
pub mod llm_service;
pub mod website_service;
