// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：网站记录和占位值规则
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：内容提取、LLM 增强和记录管理
pub mod models;
pub mod repositories;
pub mod services;
